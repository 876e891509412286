pub mod answer;
pub mod report;
pub mod result;
pub mod session;
pub mod status;
