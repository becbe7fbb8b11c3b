pub mod incoming;
