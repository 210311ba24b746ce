mod guard_proptest;
mod validation_proptest;
