pub mod employee_registration;

pub use employee_registration::EmployeeRegistration;
