mod gate;
mod manager;
mod matcher;
mod traits;

pub use gate::{BlockingResponse, RequestDetails, RequestGate};
pub use manager::StoreManager;
pub use matcher::{matches_domain, ListMatcher};
pub use traits::{BlocklistManager, BlocklistMatcher};
