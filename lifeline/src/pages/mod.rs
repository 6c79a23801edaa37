pub mod donor;
pub mod hospital;
pub mod index;
pub mod not_found;
pub mod sos;

pub use donor::DonorDashboard;
pub use hospital::HospitalDashboard;
pub use index::IndexPage;
pub use not_found::NotFoundPage;
pub use sos::SosPage;
