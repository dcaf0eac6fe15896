pub mod order_action;
