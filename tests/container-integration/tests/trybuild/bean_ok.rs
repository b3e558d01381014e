use container_core::{bean, Autowired, Bean};

#[derive(Debug, Default)]
#[bean]
struct OkRepository;

#[derive(Debug, Default)]
#[bean(name = "okService")]
struct OkService {
    #[autowired]
    repository: Autowired<OkRepository>,
}

fn main() {
    assert_eq!(OkRepository::bean_name(), "okRepository");
    assert_eq!(OkService::bean_name(), "okService");
    let service = OkService::default();
    assert!(!service.repository.is_wired());
}
