pub mod top_list_fetcher;
