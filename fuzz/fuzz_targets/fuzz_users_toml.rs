#![no_main]

use libfuzzer_sys::fuzz_target;
use single_role_delete::domain::policies::SingleRolePolicy;
use single_role_delete::infrastructure::parse_users;
use single_role_delete::RoleName;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Users file parsing and eligibility checks must never panic
        if let Ok(users) = parse_users(content) {
            let policy = SingleRolePolicy::new(RoleName::default());
            for user in &users {
                let _ = policy.evaluate(user);
            }
        }
    }
});
