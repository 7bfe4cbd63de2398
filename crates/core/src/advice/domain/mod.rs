pub mod advice_table;
