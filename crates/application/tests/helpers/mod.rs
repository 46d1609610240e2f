#![allow(unused_imports)]

mod mock_exchanger;

pub use mock_exchanger::{answer, empty_answer, glue, srv, MockSrvExchanger};
