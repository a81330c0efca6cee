use bob::{Builder, BuilderConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub age: u32,
}

fn name_is_bob(mut u: User) -> User {
    u.name = "bob".to_string();
    u
}

fn age_is_15(mut u: User) -> User {
    u.age = 15;
    u
}

fn main() {
    env_logger::init();

    let users = Builder::with_config(
        || User {
            name: "test".to_string(),
            age: 18,
        },
        BuilderConfig::builder().label("users").max_count(10).build(),
    );

    // User { name: "test", age: 18 }
    println!("{:?}", users.build());

    // User { name: "bob", age: 15 }
    println!("{:?}", users.build_with([name_is_bob, age_is_15]));

    // three copies of the default
    println!("{:?}", users.build_many(3));

    // test-0, test-1, test-2
    println!(
        "{:?}",
        users.build_many_with(3, [|i: usize, mut u: User| {
            u.name = format!("test-{}", i);
            u
        }])
    );

    let bobs = users.override_with([name_is_bob]);
    println!("{:?}", bobs.build());
    println!("{:?}", bobs.build_with([age_is_15]));
    println!(
        "{:?}",
        bobs.build_many_with(2, [|i: usize, mut u: User| {
            u.age = i as u32;
            u
        }])
    );

    match bobs.checked_build_many(11) {
        Ok(batch) => println!("built {} users", batch.len()),
        Err(err) => println!("{}", err),
    }
}
