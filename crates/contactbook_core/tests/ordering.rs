use contactbook_core::{builtin_contacts, Contact, ContactOrdering, SortDirection};

fn names(contacts: &[Contact]) -> Vec<&str> {
    contacts.iter().map(Contact::name).collect()
}

#[test]
fn variant_aware_descending_over_builtin_dataset() {
    let mut contacts = builtin_contacts();
    ContactOrdering::VariantAware(SortDirection::Descending).sort(&mut contacts);

    assert_eq!(
        names(&contacts),
        vec!["Сергей", "Петр", "Ольга", "Иван", "Анна"]
    );

    // work contacts: company descending
    let work: Vec<&str> = contacts.iter().filter_map(|c| c.company()).collect();
    assert_eq!(work, vec!["ООО Ромашка", "ООО Код"]);

    // personal contacts: birth date descending
    let births: Vec<&str> = contacts.iter().filter_map(|c| c.birth_date()).collect();
    assert_eq!(births, vec!["2000-11-20", "1990-01-01", "1985-05-15"]);
}

#[test]
fn variant_partitioned_over_builtin_dataset() {
    let mut contacts = builtin_contacts();
    ContactOrdering::VariantPartitioned.sort(&mut contacts);

    assert_eq!(
        names(&contacts),
        vec!["Сергей", "Иван", "Анна", "Петр", "Ольга"]
    );
}

#[test]
fn variant_aware_descending_uses_position_as_tie_break() {
    let mut contacts = vec![
        Contact::work("A", "1", "x", "Analyst", "Acme"),
        Contact::work("B", "2", "x", "Manager", "Acme"),
        Contact::work("C", "3", "x", "Clerk", "Acme"),
    ];
    ContactOrdering::VariantAware(SortDirection::Descending).sort(&mut contacts);

    assert_eq!(names(&contacts), vec!["B", "C", "A"]);
}

#[test]
fn sorting_is_stable_for_equal_keys() {
    let mut contacts = vec![
        Contact::personal("Same", "1", "x", "2000-01-01", "first"),
        Contact::work("Other", "2", "x", "P", "C"),
        Contact::personal("Same", "3", "x", "1999-01-01", "second"),
        Contact::personal("Same", "4", "x", "1998-01-01", "third"),
    ];

    ContactOrdering::ByName(SortDirection::Ascending).sort(&mut contacts);
    let phones: Vec<&str> = contacts.iter().map(Contact::phone).collect();
    assert_eq!(phones, vec!["2", "1", "3", "4"]);

    ContactOrdering::ByName(SortDirection::Descending).sort(&mut contacts);
    let phones: Vec<&str> = contacts.iter().map(Contact::phone).collect();
    assert_eq!(phones, vec!["1", "3", "4", "2"]);
}

#[test]
fn variant_aware_keeps_equal_birth_dates_in_prior_order() {
    let mut contacts = vec![
        Contact::personal("Zed", "1", "x", "1990-01-01", "a"),
        Contact::personal("Amy", "2", "x", "1990-01-01", "b"),
        Contact::personal("Bob", "3", "x", "1980-01-01", "c"),
    ];
    ContactOrdering::VariantAware(SortDirection::Descending).sort(&mut contacts);

    assert_eq!(names(&contacts), vec!["Zed", "Amy", "Bob"]);
}

#[test]
fn variant_partitioned_keeps_equal_work_keys_in_prior_order() {
    let mut contacts = vec![
        Contact::work("First", "1", "x", "Dev", "Acme"),
        Contact::personal("Solo", "2", "x", "2001-01-01", "s"),
        Contact::work("Second", "3", "x", "Dev", "Acme"),
    ];
    ContactOrdering::VariantPartitioned.sort(&mut contacts);

    assert_eq!(names(&contacts), vec!["Solo", "First", "Second"]);
}

#[test]
fn by_name_descending_equals_reversed_ascending() {
    let base = vec![
        Contact::personal("Дарья", "1", "x", "y", "z"),
        Contact::work("Борис", "2", "x", "y", "z"),
        Contact::personal("Алла", "3", "x", "y", "z"),
        Contact::work("Глеб", "4", "x", "y", "z"),
    ];

    let mut ascending = base.clone();
    ContactOrdering::ByName(SortDirection::Ascending).sort(&mut ascending);

    let mut reversed = ascending.clone();
    ContactOrdering::ByName(SortDirection::Descending).sort(&mut reversed);
    reversed.reverse();

    let mut descending = base;
    ContactOrdering::ByName(SortDirection::Descending).sort(&mut descending);
    descending.reverse();

    assert_eq!(reversed, ascending);
    assert_eq!(descending, ascending);
}

#[test]
fn variant_aware_sort_never_panics_on_large_mixed_input() {
    let mut contacts: Vec<Contact> = (0..200)
        .map(|i| {
            if i % 3 == 0 {
                Contact::work(
                    format!("name-{:03}", (i * 37) % 200),
                    "0",
                    "x",
                    format!("pos-{}", i % 7),
                    format!("co-{}", i % 5),
                )
            } else {
                Contact::personal(
                    format!("name-{:03}", (i * 53) % 200),
                    "0",
                    "x",
                    format!("19{:02}-01-01", i % 100),
                    "e",
                )
            }
        })
        .collect();

    ContactOrdering::VariantAware(SortDirection::Ascending).sort(&mut contacts);
    assert_eq!(contacts.len(), 200);
}
