pub mod fetch_service;
pub mod series_service;
pub mod indicator_service;
pub mod decision_service;
pub mod analysis_service;
pub mod report_service;
pub mod chart_service;
