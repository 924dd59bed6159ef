pub mod ecs;
pub mod pricing;
pub mod report;
pub mod scenario;
