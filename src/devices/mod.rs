//! Device drivers

pub mod mpu6050;

pub use mpu6050::Mpu6050;
