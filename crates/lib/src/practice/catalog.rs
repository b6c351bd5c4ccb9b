//! # Practice Problem Catalog
//!
//! The fixed set of practice problems served by the `/get-practice-questions`
//! endpoint. The table is a `static`, populated at compile time and never mutated,
//! so it can be read from any number of requests at once.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One practice problem. The schema and rows it runs against come from
/// [`super::seeds::seed_script`] under the same id.
#[derive(Debug, Clone, Serialize)]
pub struct CannedProblem {
    pub id: u32,
    pub difficulty: Difficulty,
    pub title: &'static str,
    pub description: &'static str,
    /// Table signatures shown to the user, e.g. `Employee(id, salary)`.
    #[serde(rename = "tables")]
    pub table_signatures: &'static [&'static str],
    pub example_output: &'static str,
    pub hint: &'static str,
    #[serde(rename = "solution")]
    pub reference_solution: &'static str,
}

/// Looks up a problem by id.
pub fn problem(id: u32) -> Option<&'static CannedProblem> {
    PROBLEMS.iter().find(|p| p.id == id)
}

pub static PROBLEMS: &[CannedProblem] = &[
    CannedProblem {
        id: 1,
        difficulty: Difficulty::Easy,
        title: "Combine Two Tables",
        description: "Report the first name, last name, city, and state of each person in the Person table. If the address of a person is not present in the Address table, report NULL instead.",
        table_signatures: &[
            "Person(personId, lastName, firstName)",
            "Address(addressId, personId, city, state)",
        ],
        example_output: "firstName | lastName | city          | state\nAllen     | Wang     | NULL          | NULL\nBob       | Alice    | New York City | New York",
        hint: "Use a LEFT JOIN so people without an address are kept.",
        reference_solution: "SELECT p.firstName, p.lastName, a.city, a.state\nFROM Person p\nLEFT JOIN Address a ON p.personId = a.personId;",
    },
    CannedProblem {
        id: 2,
        difficulty: Difficulty::Easy,
        title: "Employees Earning More Than Their Managers",
        description: "Find the employees who earn more than their managers.",
        table_signatures: &["Employee(id, name, salary, managerId)"],
        example_output: "Employee\nJoe",
        hint: "Join the Employee table with itself, matching managerId to id.",
        reference_solution: "SELECT e.name AS Employee\nFROM Employee e\nJOIN Employee m ON e.managerId = m.id\nWHERE e.salary > m.salary;",
    },
    CannedProblem {
        id: 3,
        difficulty: Difficulty::Easy,
        title: "Duplicate Emails",
        description: "Report all the duplicate emails. Every email is lowercase.",
        table_signatures: &["Person(id, email)"],
        example_output: "Email\na@b.com",
        hint: "Group by email and keep the groups with more than one row.",
        reference_solution: "SELECT email AS Email\nFROM Person\nGROUP BY email\nHAVING COUNT(*) > 1;",
    },
    CannedProblem {
        id: 4,
        difficulty: Difficulty::Medium,
        title: "Second Highest Salary",
        description: "Find the second highest distinct salary from the Employee table. If there is no second highest salary, return NULL.",
        table_signatures: &["Employee(id, salary)"],
        example_output: "SecondHighestSalary\n200",
        hint: "Sort the distinct salaries in descending order and skip the first one. Wrapping it in a scalar subquery yields NULL when there is no row.",
        reference_solution: "SELECT (\n  SELECT DISTINCT salary FROM Employee\n  ORDER BY salary DESC\n  LIMIT 1 OFFSET 1\n) AS SecondHighestSalary;",
    },
    CannedProblem {
        id: 5,
        difficulty: Difficulty::Easy,
        title: "Customers Who Never Order",
        description: "Find all customers who never ordered anything.",
        table_signatures: &["Customers(id, name)", "Orders(id, customerId)"],
        example_output: "Customers\nHenry\nMax",
        hint: "Exclude every customer id that appears in the Orders table.",
        reference_solution: "SELECT name AS Customers\nFROM Customers\nWHERE id NOT IN (SELECT customerId FROM Orders);",
    },
    CannedProblem {
        id: 6,
        difficulty: Difficulty::Medium,
        title: "Department Highest Salary",
        description: "Find the employees who have the highest salary in each of the departments.",
        table_signatures: &[
            "Employee(id, name, salary, departmentId)",
            "Department(id, name)",
        ],
        example_output: "Department | Employee | Salary\nIT         | Jim      | 90000\nSales      | Henry    | 80000\nIT         | Max      | 90000",
        hint: "Compare each salary with the maximum salary of its own department.",
        reference_solution: "SELECT d.name AS Department, e.name AS Employee, e.salary AS Salary\nFROM Employee e\nJOIN Department d ON e.departmentId = d.id\nWHERE e.salary = (\n  SELECT MAX(salary) FROM Employee WHERE departmentId = e.departmentId\n);",
    },
    CannedProblem {
        id: 7,
        difficulty: Difficulty::Easy,
        title: "Rising Temperature",
        description: "Find all dates' id with higher temperatures compared to its previous date (yesterday).",
        table_signatures: &["Weather(id, recordDate, temperature)"],
        example_output: "id\n2\n4",
        hint: "Join the table with itself on consecutive dates using DATE(..., '+1 day').",
        reference_solution: "SELECT w1.id\nFROM Weather w1\nJOIN Weather w2 ON w1.recordDate = DATE(w2.recordDate, '+1 day')\nWHERE w1.temperature > w2.temperature;",
    },
    CannedProblem {
        id: 8,
        difficulty: Difficulty::Easy,
        title: "Big Countries",
        description: "A country is big if it has an area of at least three million km2, or a population of at least twenty-five million. Find the name, population, and area of the big countries.",
        table_signatures: &["World(name, continent, area, population, gdp)"],
        example_output: "name        | population | area\nAfghanistan | 25500100   | 652230\nAlgeria     | 37100000   | 2381741",
        hint: "Two conditions joined with OR.",
        reference_solution: "SELECT name, population, area\nFROM World\nWHERE area >= 3000000 OR population >= 25000000;",
    },
    CannedProblem {
        id: 9,
        difficulty: Difficulty::Easy,
        title: "Classes More Than 5 Students",
        description: "Find all the classes that have at least five students.",
        table_signatures: &["Courses(student, class)"],
        example_output: "class\nMath",
        hint: "GROUP BY class and filter groups with HAVING.",
        reference_solution: "SELECT class\nFROM Courses\nGROUP BY class\nHAVING COUNT(student) >= 5;",
    },
    CannedProblem {
        id: 10,
        difficulty: Difficulty::Easy,
        title: "Not Boring Movies",
        description: "Report the movies with an odd-numbered id and a description that is not \"boring\", ordered by rating in descending order.",
        table_signatures: &["Cinema(id, movie, description, rating)"],
        example_output: "id | movie      | description | rating\n5  | House card | Interesting | 9.1\n1  | War        | great 3D    | 8.9",
        hint: "Use the modulo operator to keep odd ids.",
        reference_solution: "SELECT *\nFROM Cinema\nWHERE id % 2 = 1 AND description != 'boring'\nORDER BY rating DESC;",
    },
    CannedProblem {
        id: 11,
        difficulty: Difficulty::Easy,
        title: "Find Customer Referee",
        description: "Find the names of the customers that are not referred by the customer with id = 2.",
        table_signatures: &["Customer(id, name, referee_id)"],
        example_output: "name\nWill\nJane\nBill\nZack",
        hint: "NULL is neither equal nor unequal to 2; handle it explicitly.",
        reference_solution: "SELECT name\nFROM Customer\nWHERE referee_id != 2 OR referee_id IS NULL;",
    },
    CannedProblem {
        id: 12,
        difficulty: Difficulty::Easy,
        title: "Game Play Analysis I",
        description: "Report the first login date for each player.",
        table_signatures: &["Activity(player_id, device_id, event_date, games_played)"],
        example_output: "player_id | first_login\n1         | 2016-03-01\n2         | 2017-06-25\n3         | 2016-03-02",
        hint: "MIN works on ISO-formatted date strings.",
        reference_solution: "SELECT player_id, MIN(event_date) AS first_login\nFROM Activity\nGROUP BY player_id;",
    },
    CannedProblem {
        id: 13,
        difficulty: Difficulty::Medium,
        title: "Consecutive Numbers",
        description: "Find all numbers that appear at least three times consecutively.",
        table_signatures: &["Logs(id, num)"],
        example_output: "ConsecutiveNums\n1",
        hint: "Join the table with itself twice on id + 1 and id + 2.",
        reference_solution: "SELECT DISTINCT l1.num AS ConsecutiveNums\nFROM Logs l1\nJOIN Logs l2 ON l2.id = l1.id + 1\nJOIN Logs l3 ON l3.id = l1.id + 2\nWHERE l1.num = l2.num AND l2.num = l3.num;",
    },
    CannedProblem {
        id: 14,
        difficulty: Difficulty::Medium,
        title: "Rank Scores",
        description: "Rank the scores from highest to lowest. Ties share a rank, and the next rank is the next consecutive integer (no gaps).",
        table_signatures: &["Scores(id, score)"],
        example_output: "score | rank\n4.00  | 1\n4.00  | 1\n3.85  | 2\n3.65  | 3\n3.65  | 3\n3.50  | 4",
        hint: "A score's rank is the number of distinct scores greater than or equal to it.",
        reference_solution: "SELECT s.score,\n  (SELECT COUNT(DISTINCT score) FROM Scores WHERE score >= s.score) AS \"rank\"\nFROM Scores s\nORDER BY s.score DESC;",
    },
    CannedProblem {
        id: 15,
        difficulty: Difficulty::Medium,
        title: "Managers with at Least 5 Direct Reports",
        description: "Find the managers with at least five direct reports.",
        table_signatures: &["Employee(id, name, department, managerId)"],
        example_output: "name\nJohn",
        hint: "Count reports per managerId, then join back to get the name.",
        reference_solution: "SELECT m.name\nFROM Employee m\nJOIN Employee e ON e.managerId = m.id\nGROUP BY m.id, m.name\nHAVING COUNT(e.id) >= 5;",
    },
    CannedProblem {
        id: 16,
        difficulty: Difficulty::Medium,
        title: "Exchange Seats",
        description: "Swap the seat id of every two consecutive students. If the number of students is odd, the id of the last student is not swapped. Return the result ordered by id.",
        table_signatures: &["Seat(id, student)"],
        example_output: "id | student\n1  | Doris\n2  | Abbot\n3  | Green\n4  | Emerson\n5  | Jeames",
        hint: "Use CASE on the parity of id and compare against the total count.",
        reference_solution: "SELECT CASE\n    WHEN id % 2 = 1 AND id = (SELECT COUNT(*) FROM Seat) THEN id\n    WHEN id % 2 = 1 THEN id + 1\n    ELSE id - 1\n  END AS id,\n  student\nFROM Seat\nORDER BY id;",
    },
    CannedProblem {
        id: 17,
        difficulty: Difficulty::Hard,
        title: "Department Top Three Salaries",
        description: "A high earner in a department is an employee whose salary is in the top three unique salaries of that department. Find the high earners in each department.",
        table_signatures: &[
            "Employee(id, name, salary, departmentId)",
            "Department(id, name)",
        ],
        example_output: "Department | Employee | Salary\nIT         | Max      | 90000\nIT         | Joe      | 85000\nIT         | Randy    | 85000\nIT         | Will     | 70000\nSales      | Henry    | 80000\nSales      | Sam      | 60000",
        hint: "Keep an employee when fewer than three distinct salaries in the same department are higher.",
        reference_solution: "SELECT d.name AS Department, e.name AS Employee, e.salary AS Salary\nFROM Employee e\nJOIN Department d ON e.departmentId = d.id\nWHERE (\n  SELECT COUNT(DISTINCT e2.salary)\n  FROM Employee e2\n  WHERE e2.departmentId = e.departmentId AND e2.salary > e.salary\n) < 3\nORDER BY d.name, e.salary DESC;",
    },
    CannedProblem {
        id: 18,
        difficulty: Difficulty::Hard,
        title: "Trips and Users",
        description: "The cancellation rate is the number of cancelled requests with unbanned users (both client and driver) divided by the total number of requests with unbanned users on that day. Find the cancellation rate, rounded to two decimals, for each day between 2013-10-01 and 2013-10-03.",
        table_signatures: &[
            "Trips(id, client_id, driver_id, city_id, status, request_at)",
            "Users(users_id, banned, role)",
        ],
        example_output: "Day        | Cancellation Rate\n2013-10-01 | 0.33\n2013-10-02 | 0.0\n2013-10-03 | 0.5",
        hint: "Join Users twice (client and driver) to drop banned users, then average a 0/1 flag.",
        reference_solution: "SELECT t.request_at AS Day,\n  ROUND(SUM(CASE WHEN t.status != 'completed' THEN 1.0 ELSE 0 END) / COUNT(*), 2) AS \"Cancellation Rate\"\nFROM Trips t\nJOIN Users c ON t.client_id = c.users_id AND c.banned = 'No'\nJOIN Users d ON t.driver_id = d.users_id AND d.banned = 'No'\nWHERE t.request_at BETWEEN '2013-10-01' AND '2013-10-03'\nGROUP BY t.request_at;",
    },
    CannedProblem {
        id: 19,
        difficulty: Difficulty::Hard,
        title: "Human Traffic of Stadium",
        description: "Display the records with three or more rows with consecutive ids where the number of people is greater than or equal to 100 for each. Return the result ordered by visit_date.",
        table_signatures: &["Stadium(id, visit_date, people)"],
        example_output: "id | visit_date | people\n5  | 2017-01-05 | 145\n6  | 2017-01-06 | 1455\n7  | 2017-01-07 | 199\n8  | 2017-01-09 | 188",
        hint: "A row qualifies if it starts, sits in the middle of, or ends a run of three busy ids.",
        reference_solution: "SELECT DISTINCT s1.*\nFROM Stadium s1, Stadium s2, Stadium s3\nWHERE s1.people >= 100 AND s2.people >= 100 AND s3.people >= 100\n  AND (\n    (s2.id = s1.id + 1 AND s3.id = s1.id + 2)\n    OR (s2.id = s1.id - 1 AND s3.id = s1.id + 1)\n    OR (s2.id = s1.id - 2 AND s3.id = s1.id - 1)\n  )\nORDER BY s1.visit_date;",
    },
    CannedProblem {
        id: 20,
        difficulty: Difficulty::Medium,
        title: "Customers Who Bought All Products",
        description: "Report the customer ids that bought all the products in the Product table.",
        table_signatures: &["Customer(customer_id, product_key)", "Product(product_key)"],
        example_output: "customer_id\n1\n3",
        hint: "Compare each customer's count of distinct products with the total product count.",
        reference_solution: "SELECT customer_id\nFROM Customer\nGROUP BY customer_id\nHAVING COUNT(DISTINCT product_key) = (SELECT COUNT(*) FROM Product);",
    },
];
