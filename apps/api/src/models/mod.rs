pub mod candidate;
pub mod job;
pub mod persona;

pub use candidate::{Candidate, CandidateRow, InterviewRecord};
pub use job::{Job, JobRow};
pub use persona::{Persona, PersonaRow};
