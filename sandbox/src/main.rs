mod logger;

use std::error::Error;

use colored::Colorize;
use log::info;
use strum::IntoEnumIterator;
use typed_list::{type_list, typed_list, TypedList, TypedListResult};


type Mixed = type_list![String, i32, f32];
type Wide = type_list![i32, String, f32, char];
type Numbers = type_list![i32, f32];
type Superset = type_list![f32, String, i32];

#[derive(strum::EnumIter, Debug, Clone, Copy, PartialEq)]
enum Scenario {
    MoveAndAssign,
    SliceAndSet,
    Erase,
    CrossSignatureCopy,
    VisitAndContains,
}

impl Scenario {
    fn run(self) -> TypedListResult<()> {
        match self {
            Scenario::MoveAndAssign => move_and_assign(),
            Scenario::SliceAndSet => slice_and_set(),
            Scenario::Erase => erase(),
            Scenario::CrossSignatureCopy => cross_signature_copy(),
            Scenario::VisitAndContains => visit_and_contains(),
        }
    }
}

fn wide() -> TypedList<Wide> {
    typed_list![
        3i32,
        5i32,
        3.4f32,
        'z',
        8.2f32,
        String::from("Hello World")
    ]
}

fn move_and_assign() -> TypedListResult<()> {
    let empty: TypedList<Mixed> = TypedList::new();
    let mut source: TypedList<Mixed> = typed_list![3i32, String::from("ab"), 5i32, 3.4f32];
    info!("empty: {}", empty);
    info!("source: {}", source);

    let mut moved = source.take();
    info!("source after move: {}", source);
    info!("moved: {}", moved);

    let mut assigned: TypedList<Mixed> = TypedList::new();
    info!("assigned before: {}", assigned);
    assigned.clone_from(&moved);
    info!("assigned after: {}", assigned);

    moved += &assigned;
    info!("moved after append ({} items): {}", moved.len(), moved);
    Ok(())
}

fn slice_and_set() -> TypedListResult<()> {
    let list = wide();
    let mut slice = list.slice(2, 5);
    info!("{} sliced [2, 5): {}", list, slice);
    slice.set(2, 99i32)?;
    info!("slice after set: {}", slice);
    info!("slice clamped [-2, 100): {}", list.slice(-2, 100));
    Ok(())
}

fn erase() -> TypedListResult<()> {
    let mut list = wide();
    list.erase(2, 5)?;
    info!("after erase [2, 5) ({} items): {}", list.len(), list);
    if let Err(error) = list.erase(1, 9) {
        info!("erase [1, 9) rejected: {}", error);
    }
    Ok(())
}

fn cross_signature_copy() -> TypedListResult<()> {
    let numbers: TypedList<Numbers> = typed_list![3i32, 5i32, 3.4f32];
    let superset = TypedList::<Superset>::from_list(&numbers);
    info!("{} copied into superset: {}", numbers, superset);
    info!("equal: {}", superset.eq_list(&numbers));

    let mut other: TypedList<Superset> = typed_list![String::from("x"), 3.0f32];
    info!("{} equal before assign: {}", other, other.eq_list(&numbers));
    other.assign_from(&numbers);
    info!("{} equal after assign: {}", other, other.eq_list(&numbers));
    other.push_from(&numbers, 0)?;
    info!("after push_from: {}", other);
    Ok(())
}

fn visit_and_contains() -> TypedListResult<()> {
    let mut list = wide();
    list.visit_all(|value: &mut i32| *value += 1);
    info!("integers incremented: {}", list);
    info!("contains 4: {}", list.contains(&4i32));
    info!("contains 3: {}", list.contains(&3i32));
    info!("contains 3.4: {}", list.contains(&3.4f32));
    info!("first char at: {:?}", list.position_of(&'z'));
    let char_value = list.get_as::<char, _>(3)?;
    info!("element 3 as char: {}", char_value);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init()?;
    info!("log level {}", log::max_level());
    for scenario in Scenario::iter() {
        info!("{}", format!("== {:?}", scenario).bold());
        scenario.run()?;
    }
    Ok(())
}
