//! Общие контракты frontend и backend: доменные типы, вычисления формы
//! материалов, DTO ассистента, демо-данные.

pub mod domain;
pub mod shared;
pub mod usecases;
