mod initialize_pool_test;
mod pool_test;
