//! Built-in sample ledger
//!
//! Four months of plausible transactions so the tool demonstrates a full
//! forecast without any input file. The sample path and the --file path
//! feed the same parser entry point.

pub const SAMPLE_CSV: &str = "\
date,category,amount
2024-01-01,Income,4200
2024-01-02,Rent,1500
2024-01-04,Groceries,112.40
2024-01-07,Dining,48.25
2024-01-09,Transport,42.00
2024-01-12,Groceries,98.15
2024-01-14,Utilities,132.80
2024-01-18,Entertainment,35.99
2024-01-21,Groceries,124.60
2024-01-25,Dining,62.30
2024-01-28,Transport,51.50
2024-02-01,Income,4200
2024-02-02,Rent,1500
2024-02-05,Groceries,105.90
2024-02-08,Dining,71.45
2024-02-10,Transport,45.00
2024-02-13,Groceries,118.35
2024-02-15,Utilities,128.60
2024-02-18,Entertainment,52.99
2024-02-22,Groceries,131.20
2024-02-24,Dining,88.10
2024-02-27,Transport,49.75
2024-03-01,Income,4200
2024-03-02,Rent,1500
2024-03-05,Groceries,121.70
2024-03-08,Dining,94.60
2024-03-11,Transport,56.25
2024-03-14,Groceries,109.45
2024-03-16,Utilities,141.30
2024-03-19,Entertainment,67.98
2024-03-23,Groceries,136.80
2024-03-26,Dining,102.35
2024-03-29,Transport,58.40
2024-04-01,Income,4200
2024-04-02,Rent,1500
2024-04-04,Groceries,117.25
2024-04-07,Dining,59.80
2024-04-10,Transport,47.60
2024-04-12,Travel,420.00
2024-04-15,Utilities,135.45
2024-04-18,Entertainment,41.99
2024-04-21,Groceries,128.90
2024-04-24,Dining,76.20
2024-04-27,Transport,52.15
";
