pub mod orders_client;
