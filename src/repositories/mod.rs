//! 데이터 접근 계층
//!
//! Spring Data의 Repository와 같은 역할입니다. 각 저장소는 trait으로 정의되고,
//! 구현체는 `main`에서 만들어 서비스에 `Arc<dyn ...>`로 주입합니다.

pub mod users;
