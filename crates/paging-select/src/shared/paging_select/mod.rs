//! Paging Select
//!
//! Селект, который загружает опции постранично из удалённого источника.
//!
//! ## Использование
//!
//! ```rust,ignore
//! use crate::shared::paging_select::{HttpOptionSource, PagingSelect};
//!
//! let value = RwSignal::new(String::new());
//! view! {
//!     <PagingSelect
//!         source=HttpOptionSource::new("/api/options")
//!         value=value
//!         page_size=10usize
//!         on_related=Callback::new(|record| { /* ... */ })
//!     />
//! }
//! ```
//!
//! Логика загрузки живёт в [`PagingCoordinator`] и не зависит от Leptos.

pub mod component;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod http_source;
pub mod state;
pub mod traits;

pub use component::PagingSelect;
pub use config::{ReloadOnOpen, SelectConfig, DEFAULT_PAGE_SIZE};
pub use coordinator::{LoadOutcome, PagingCoordinator, SelectEvent, SelectListener};
pub use error::{ConfigError, FetchError};
pub use http_source::HttpOptionSource;
pub use state::PageState;
pub use traits::{source_fn, FnSource, OptionSource, SelectOption};
