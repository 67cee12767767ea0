/*!
# Comments, Many Queries, and Code

## Comments

Comments are ignored. Line comments start with `//` or `#` and run to the
end of the line. Block comments start with `/*` and end with `*/`. They
may span lines, and line numbers in error messages still count from the
top of the original text.

```text
every monday // standup
# rent
every 1st
```

## Many Queries

Text with more than one query is split before every `every` and before
every shorthand word. Each query is resolved on its own and a query
with an error does not stop the others.

```text
every monday
every 1st
daily
```

Running `dzen FILE` prints one date per query, in order. Errors go to
standard error and the exit status is 1 if any query failed.

## Code

When no phrase says what you mean, a query may compute the number of days
until the next date. The letter `f` is followed by code between `{::` and
`::}`. The code must evaluate to a function that takes the current date and
returns a number of days between 1 and 9999. Fractions are dropped.

```text
every f{:: (now) => 7 - now.getDay() ::}
```

A backslash takes the next character literally, so `\::}` does not end
the block.

Running code is unsafe, so it is refused unless allowed. The command line
allows it with `--allow-unsafe` and runs the code with Node.js, which can
be chosen with `--node`. Applications embedding the library allow it in
the settings of their context and supply their own evaluator.

<pre><code>&nbsp;> every f{:: () => 7 ::}
&nbsp;  RuntimeError on line 1 col 7
&nbsp;    > Unsafe code execution is not allowed. If you want to allow it, you can do so in the context's settings.
&nbsp;    > every f{:: () => 7 ::}
&nbsp;            ‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾
</code></pre>

*/
