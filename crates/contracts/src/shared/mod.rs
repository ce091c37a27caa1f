pub mod paging_select;
