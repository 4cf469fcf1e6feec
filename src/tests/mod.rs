mod test_clock;
mod test_interval_gate;
