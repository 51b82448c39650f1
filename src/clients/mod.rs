pub mod douban_client;
