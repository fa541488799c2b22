//! Builds a document programmatically through the public API and prints it.

use toml_tree::{Array, Table, TableArray, Value};

fn main() {
    let mut root = Table::new();
    root.insert("Integer", 1234i64);
    root.insert("Double", 1.234);
    root.insert("String", "ABCD");

    let mut table = Table::new();
    table.insert("ElementOne", 1i64);
    table.insert("ElementTwo", 2.0);
    table.insert("ElementThree", "THREE");

    let mut nested = Table::new();
    nested.insert("ElementOne", 2i64);
    nested.insert("ElementTwo", 3.0);
    nested.insert("ElementThree", "FOUR");
    table.insert("Nested", nested);

    let int_array: Array = (1i64..=5).map(Value::Integer).collect();
    root.insert("IntegerArray", int_array.clone());

    let mut double_array = Array::new();
    for v in [1.1, 2.2, 3.3, 4.4, 5.5] {
        double_array.push(v);
    }
    root.insert("DoubleArray", double_array.clone());

    let mut string_array = Array::new();
    for v in ["A", "B", "C", "D", "E"] {
        string_array.push(v);
    }
    root.insert("StringArray", string_array.clone());

    let mut table_array = TableArray::new();
    for _ in 0..3 {
        table_array.push(table.clone());
    }
    root.insert("TableArray", table_array);
    root.insert("Table", table);

    let mut array_of_arrays = Array::new();
    array_of_arrays.push(int_array);
    array_of_arrays.push(double_array);
    array_of_arrays.push(string_array);
    root.insert("ArrayOfArrays", array_of_arrays);

    print!("{root}");
}
