pub mod arrival_generator;
