#![allow(dead_code)]

use ferrous_lookup_domain::{DohAnswer, DohResponse, RecordType};

pub struct DohResponseBuilder {
    answer: Vec<DohAnswer>,
}

impl DohResponseBuilder {
    pub fn new() -> Self {
        Self { answer: vec![] }
    }

    pub fn a(mut self, data: &str) -> Self {
        self.answer.push(DohAnswer::new(RecordType::A, data));
        self
    }

    pub fn aaaa(mut self, data: &str) -> Self {
        self.answer.push(DohAnswer::new(RecordType::AAAA, data));
        self
    }

    pub fn cname(mut self, data: &str) -> Self {
        self.answer.push(DohAnswer::new(RecordType::CNAME, data));
        self
    }

    pub fn build(self) -> DohResponse {
        DohResponse::new(self.answer)
    }
}
