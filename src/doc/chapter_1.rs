/*!
# Relative Dates

A relative command counts forward from today. It is an optional
quantity followed by a unit. Without a quantity, one is assumed.

```text
every day         2024-01-02
every 2 days      2024-01-03
every 3 weeks     2024-01-22
every month       2024-02-01
every 10 years    2034-01-01
```

The units are `day`, `week`, `month`, and `year`, each with a plural
form. The plural is not checked against the quantity so `every 1 days`
and `every 2 day` are both fine.

Adding months or years keeps the day of the month. When the target month
is too short, the days it lacks carry over into the month after it.

```text
every month       2024-03-02   (from January 31st)
every year        2025-03-01   (from February 29th 2024)
```

A quantity of zero is a runtime error. The quantity must fit in 32 bits
or it is rejected as a syntax error.

## Shorthands

Some words stand for a whole `every` phrase.

```text
everyday          every day
daily             every day
weekly            every week
monthly           every month
yearly            every year
annually          every year
```

A shorthand may only start a query. More commands may follow it after a
comma.

```text
weekly, 3 days    2024-01-04
```

*/
