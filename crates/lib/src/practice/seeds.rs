//! Schema and seed rows for each practice problem, keyed by problem id.

/// Returns the setup script for `question_id`, or `None` for ids outside the catalog.
pub fn seed_script(question_id: u32) -> Option<&'static str> {
    let script = match question_id {
        1 => {
            "CREATE TABLE Person (personId INTEGER PRIMARY KEY, lastName TEXT, firstName TEXT);
             CREATE TABLE Address (addressId INTEGER PRIMARY KEY, personId INTEGER, city TEXT, state TEXT);
             INSERT INTO Person VALUES (1, 'Wang', 'Allen'), (2, 'Alice', 'Bob');
             INSERT INTO Address VALUES (1, 2, 'New York City', 'New York'), (2, 3, 'Leetcode', 'California');"
        }
        2 => {
            "CREATE TABLE Employee (id INTEGER PRIMARY KEY, name TEXT NOT NULL, salary INTEGER, managerId INTEGER);
             INSERT INTO Employee VALUES (1, 'Joe', 70000, 3), (2, 'Henry', 80000, 4), (3, 'Sam', 60000, NULL), (4, 'Max', 90000, NULL);"
        }
        3 => {
            "CREATE TABLE Person (id INTEGER PRIMARY KEY, email TEXT NOT NULL);
             INSERT INTO Person VALUES (1, 'a@b.com'), (2, 'c@d.com'), (3, 'a@b.com');"
        }
        4 => {
            "CREATE TABLE Employee (id INTEGER PRIMARY KEY, salary INTEGER);
             INSERT INTO Employee VALUES (1, 100), (2, 200), (3, 300);"
        }
        5 => {
            "CREATE TABLE Customers (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
             CREATE TABLE Orders (id INTEGER PRIMARY KEY, customerId INTEGER);
             INSERT INTO Customers VALUES (1, 'Joe'), (2, 'Henry'), (3, 'Sam'), (4, 'Max');
             INSERT INTO Orders VALUES (1, 3), (2, 1);"
        }
        6 => {
            "CREATE TABLE Employee (id INTEGER PRIMARY KEY, name TEXT NOT NULL, salary INTEGER, departmentId INTEGER);
             CREATE TABLE Department (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
             INSERT INTO Employee VALUES (1, 'Joe', 70000, 1), (2, 'Jim', 90000, 1), (3, 'Henry', 80000, 2), (4, 'Sam', 60000, 2), (5, 'Max', 90000, 1);
             INSERT INTO Department VALUES (1, 'IT'), (2, 'Sales');"
        }
        7 => {
            "CREATE TABLE Weather (id INTEGER PRIMARY KEY, recordDate DATE, temperature INTEGER);
             INSERT INTO Weather VALUES (1, '2015-01-01', 10), (2, '2015-01-02', 25), (3, '2015-01-03', 20), (4, '2015-01-04', 30);"
        }
        8 => {
            "CREATE TABLE World (name TEXT PRIMARY KEY, continent TEXT, area INTEGER, population INTEGER, gdp INTEGER);
             INSERT INTO World VALUES
               ('Afghanistan', 'Asia', 652230, 25500100, 20343000000),
               ('Albania', 'Europe', 28748, 2831741, 12960000000),
               ('Algeria', 'Africa', 2381741, 37100000, 188681000000),
               ('Andorra', 'Europe', 468, 78115, 3712000000),
               ('Angola', 'Africa', 1246700, 20609294, 100990000000);"
        }
        9 => {
            "CREATE TABLE Courses (student TEXT, class TEXT);
             INSERT INTO Courses VALUES
               ('A', 'Math'), ('B', 'English'), ('C', 'Math'), ('D', 'Biology'), ('E', 'Math'),
               ('F', 'Computer'), ('G', 'Math'), ('H', 'Math'), ('I', 'Math');"
        }
        10 => {
            "CREATE TABLE Cinema (id INTEGER PRIMARY KEY, movie TEXT, description TEXT, rating REAL);
             INSERT INTO Cinema VALUES
               (1, 'War', 'great 3D', 8.9), (2, 'Science', 'fiction', 8.5), (3, 'irish', 'boring', 6.2),
               (4, 'Ice song', 'Fantacy', 8.6), (5, 'House card', 'Interesting', 9.1);"
        }
        11 => {
            "CREATE TABLE Customer (id INTEGER PRIMARY KEY, name TEXT, referee_id INTEGER);
             INSERT INTO Customer VALUES
               (1, 'Will', NULL), (2, 'Jane', NULL), (3, 'Alex', 2), (4, 'Bill', NULL), (5, 'Zack', 1), (6, 'Mark', 2);"
        }
        12 => {
            "CREATE TABLE Activity (player_id INTEGER, device_id INTEGER, event_date DATE, games_played INTEGER);
             INSERT INTO Activity VALUES
               (1, 2, '2016-03-01', 5), (1, 2, '2016-05-02', 6), (2, 3, '2017-06-25', 1),
               (3, 1, '2016-03-02', 0), (3, 4, '2018-07-03', 5);"
        }
        13 => {
            "CREATE TABLE Logs (id INTEGER PRIMARY KEY, num INTEGER);
             INSERT INTO Logs VALUES (1, 1), (2, 1), (3, 1), (4, 2), (5, 1), (6, 2), (7, 2);"
        }
        14 => {
            "CREATE TABLE Scores (id INTEGER PRIMARY KEY, score REAL);
             INSERT INTO Scores VALUES (1, 3.50), (2, 3.65), (3, 4.00), (4, 3.85), (5, 4.00), (6, 3.65);"
        }
        15 => {
            "CREATE TABLE Employee (id INTEGER PRIMARY KEY, name TEXT, department TEXT, managerId INTEGER);
             INSERT INTO Employee VALUES
               (101, 'John', 'A', NULL), (102, 'Dan', 'A', 101), (103, 'James', 'A', 101),
               (104, 'Amy', 'A', 101), (105, 'Anne', 'A', 101), (106, 'Ron', 'B', 101);"
        }
        16 => {
            "CREATE TABLE Seat (id INTEGER PRIMARY KEY, student TEXT);
             INSERT INTO Seat VALUES (1, 'Abbot'), (2, 'Doris'), (3, 'Emerson'), (4, 'Green'), (5, 'Jeames');"
        }
        17 => {
            "CREATE TABLE Employee (id INTEGER PRIMARY KEY, name TEXT NOT NULL, salary INTEGER, departmentId INTEGER);
             CREATE TABLE Department (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
             INSERT INTO Employee VALUES
               (1, 'Joe', 85000, 1), (2, 'Henry', 80000, 2), (3, 'Sam', 60000, 2), (4, 'Max', 90000, 1),
               (5, 'Janet', 69000, 1), (6, 'Randy', 85000, 1), (7, 'Will', 70000, 1);
             INSERT INTO Department VALUES (1, 'IT'), (2, 'Sales');"
        }
        18 => {
            "CREATE TABLE Trips (id INTEGER PRIMARY KEY, client_id INTEGER, driver_id INTEGER, city_id INTEGER, status TEXT, request_at TEXT);
             CREATE TABLE Users (users_id INTEGER PRIMARY KEY, banned TEXT, role TEXT);
             INSERT INTO Trips VALUES
               (1, 1, 10, 1, 'completed', '2013-10-01'), (2, 2, 11, 1, 'cancelled_by_driver', '2013-10-01'),
               (3, 3, 12, 6, 'completed', '2013-10-01'), (4, 4, 13, 6, 'cancelled_by_client', '2013-10-01'),
               (5, 1, 10, 1, 'completed', '2013-10-02'), (6, 2, 11, 6, 'completed', '2013-10-02'),
               (7, 3, 12, 6, 'completed', '2013-10-02'), (8, 2, 12, 12, 'completed', '2013-10-03'),
               (9, 3, 10, 12, 'completed', '2013-10-03'), (10, 4, 13, 12, 'cancelled_by_driver', '2013-10-03');
             INSERT INTO Users VALUES
               (1, 'No', 'client'), (2, 'Yes', 'client'), (3, 'No', 'client'), (4, 'No', 'client'),
               (10, 'No', 'driver'), (11, 'No', 'driver'), (12, 'No', 'driver'), (13, 'No', 'driver');"
        }
        19 => {
            "CREATE TABLE Stadium (id INTEGER PRIMARY KEY, visit_date DATE, people INTEGER);
             INSERT INTO Stadium VALUES
               (1, '2017-01-01', 10), (2, '2017-01-02', 109), (3, '2017-01-03', 150), (4, '2017-01-04', 99),
               (5, '2017-01-05', 145), (6, '2017-01-06', 1455), (7, '2017-01-07', 199), (8, '2017-01-09', 188);"
        }
        20 => {
            "CREATE TABLE Customer (customer_id INTEGER, product_key INTEGER);
             CREATE TABLE Product (product_key INTEGER PRIMARY KEY);
             INSERT INTO Customer VALUES (1, 5), (2, 6), (3, 5), (3, 6), (1, 6);
             INSERT INTO Product VALUES (5), (6);"
        }
        _ => return None,
    };
    Some(script)
}
