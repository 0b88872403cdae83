pub mod flight_store;
