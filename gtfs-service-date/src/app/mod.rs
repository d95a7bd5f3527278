mod service_date_app;

pub use service_date_app::ServiceDateApp;
