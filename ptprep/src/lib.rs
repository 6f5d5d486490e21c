pub mod shuttle;
