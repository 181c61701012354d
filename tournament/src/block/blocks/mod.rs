pub mod thruster;
