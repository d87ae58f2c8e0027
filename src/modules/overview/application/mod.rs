pub mod overview_use_cases;
pub mod ports;
pub mod service;
