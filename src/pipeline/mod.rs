pub mod import;
pub mod extraction;
pub mod lab_report;
pub mod storage;
