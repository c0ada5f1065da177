pub mod hand_helper;
