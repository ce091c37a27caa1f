pub mod api_utils;
pub mod paging_select;
