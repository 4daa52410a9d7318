pub mod menu_repo_impl;
pub mod pool;

pub use menu_repo_impl::PgMenuItemRepository;
pub use pool::create_pool;
