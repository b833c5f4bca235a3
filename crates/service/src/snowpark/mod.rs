pub mod repository;
pub mod memory;
pub mod service;

pub use memory::MemorySnowparkRepository;
pub use repository::SnowparkRepository;
pub use service::SnowparkService;
