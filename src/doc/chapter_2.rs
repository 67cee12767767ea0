/*!
# Absolute Dates

An absolute command names a day of the week, a day of the month, or a
day of the year. The answer is the next such day after today.

## Days of the Week

```text
every monday      2024-01-08
every tuesday     2024-01-02
every sunday      2024-01-07
```

Today never matches. Asking for `every monday` on a Monday gives the
Monday a week later.

## Days of the Month

A day of the month is a number followed by an ordinal suffix. Any of
`st`, `nd`, `rd`, or `th` may be used with any number, so `2th` is the
same as `2nd`. There must be no space between the number and the suffix.

```text
every 8th         2024-01-08
every 1st         2024-02-01
every 31st        2024-01-31
```

Months too short for the day are skipped. On January 31st, `every 30th`
gives March 30th. Only 1 through 31 are accepted.

<pre><code>&nbsp;> every 32nd
&nbsp;  RuntimeError on line 1 col 7
&nbsp;    > Invalid day of month. The date should be between 1 and 31
&nbsp;    > every 32nd
&nbsp;            ‾‾‾‾
</code></pre>

## Days of the Year

A month followed by a day of the month names one day of the year.

```text
every february 8th    2024-02-08
every january 1st     2025-01-01
every december 25th   2024-12-25
```

The day must exist in that month. February always allows the 29th, which
resolves to the next leap year that has one.

```text
every february 29th   2024-02-29
every february 30th   RuntimeError
```

*/
