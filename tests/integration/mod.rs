mod routing_test;
mod submission_test;
