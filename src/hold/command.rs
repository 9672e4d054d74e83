pub mod place_on_hold_cmd;
