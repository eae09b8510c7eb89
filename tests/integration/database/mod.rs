//! Backend selection and schema tests
