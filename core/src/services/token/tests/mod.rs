mod service_tests;

pub(crate) use factory::JwtFactory;
