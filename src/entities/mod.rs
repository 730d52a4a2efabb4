//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities mirror the tables the hotel endpoints read from.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod enrollment;
pub mod hotel;
pub mod room;
pub mod session;
pub mod ticket;
pub mod ticket_type;
pub mod user;

// Re-export specific types to avoid conflicts
pub use enrollment::{
    Column as EnrollmentColumn, Entity as Enrollment, Model as EnrollmentModel,
};
pub use hotel::{Column as HotelColumn, Entity as Hotel, Model as HotelModel};
pub use room::{Column as RoomColumn, Entity as Room, Model as RoomModel};
pub use session::{Column as SessionColumn, Entity as Session, Model as SessionModel};
pub use ticket::{Column as TicketColumn, Entity as Ticket, Model as TicketModel, TicketStatus};
pub use ticket_type::{
    Column as TicketTypeColumn, Entity as TicketType, Model as TicketTypeModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
