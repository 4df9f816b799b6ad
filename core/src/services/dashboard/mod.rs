//! Quote dashboard service

mod service;

pub use service::DashboardService;
