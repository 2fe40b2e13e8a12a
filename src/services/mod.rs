// Service exports
pub mod cache;
pub mod memory;
pub mod store;
pub mod supabase;

pub use cache::{CachedRegistryStore, CacheKey};
pub use memory::InMemoryStore;
pub use store::{absorb, AcademicStore, StoreError};
pub use supabase::{SupabaseClient, SupabaseTables};
