use tortoise::prelude::*;

fn values<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe(arena: &ListArena<i32>, id: Option<NodeId>) -> String {
    id.and_then(|id| arena.value(id))
        .map_or_else(|| "none".to_owned(), ToString::to_string)
}

fn lists(arena: &mut ListArena<i32>) -> Result<(), ListError> {
    let looped = singly!(arena; 1 => 2 => 3 => 4 => 5);
    arena.link_tail_to(looped, 2)?;

    for strategy in [Strategy::ConstantSpace, Strategy::VisitedSet] {
        let verdict = if has_cycle_with(arena, looped, strategy) {
            "Loop detected in the linked list."
        } else {
            "No loop detected in the linked list."
        };
        println!("{verdict} ({strategy:?})");
    }

    let report = analyze(arena, looped);
    println!("Nodes in loop: {}", report.length);
    println!("Loop starts at: {}", describe(arena, report.start));
    println!("Freed {} looped nodes", arena.release(looped));

    for list in [&[1, 2, 3, 4, 5][..], &[1, 2, 3, 4][..]] {
        let head = arena.build_list(list.iter().copied());
        let middle = find_middle(arena, head)?;

        println!(
            "The middle node value of [{}] is: {}",
            values(list),
            describe(arena, middle)
        );
        arena.release(head);
    }

    Ok(())
}

fn sorts() {
    let input = [13, 46, 24, 52, 20, 9];
    let runs: [(&str, fn(&mut [i32])); 3] = [
        ("Selection", selection_sort),
        ("Bubble", bubble_sort),
        ("Insertion", insertion_sort),
    ];

    for (name, sort) in runs {
        let mut arr = input;
        sort(&mut arr);
        println!("{name} sorted array: {}", values(&arr));
    }
}

fn searches() {
    let arr = [1, 2, 3, 3, 3, 4, 5, 6];
    let target = 3;

    match binary_search(&arr, &target) {
        Some(idx) => println!("Found at index: {idx}"),
        None => println!("Not found"),
    }
    println!("Lower bound: {}", lower_bound(&arr, &target));
    println!("Upper bound: {}", upper_bound(&arr, &target));

    let desc = [6, 5, 4, 3, 2, 1];
    match descending_binary_search(&desc, &target) {
        Some(idx) => println!("Descending search: {idx}"),
        None => println!("Descending search: not found"),
    }
}

fn main() -> Result<(), ListError> {
    tortoise::init_tracing();

    let mut arena = ListArena::new();
    lists(&mut arena)?;
    sorts();
    searches();

    Ok(())
}
