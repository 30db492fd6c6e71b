pub mod lid_control;
