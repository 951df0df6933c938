mod token_provider_test;
