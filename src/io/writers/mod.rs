pub mod tales;
