mod scheduler_service;


pub use scheduler_service::SchedulerService;
