pub mod volume_controller;
