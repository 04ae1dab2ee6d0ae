mod memory_entry_repository;

pub use memory_entry_repository::InMemoryEntryRepository;
